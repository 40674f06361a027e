pub mod machine;
pub mod program;

pub mod amplifiers;
pub mod arcade;
pub mod asteroids;
pub mod beam;
pub mod boost;
pub mod diagnostics;
pub mod droid;
pub mod fft;
pub mod fuel;
pub mod gravity_assist;
pub mod moons;
pub mod orbits;
pub mod painter;
pub mod password;
pub mod reactions;
pub mod scaffold;
pub mod space_image;
pub mod wires;
