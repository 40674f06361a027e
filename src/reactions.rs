use std::collections::{HashMap, VecDeque};

/// One production rule: the quantity a single run yields, and what it eats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub quantity: i64,
    pub inputs: Vec<(String, i64)>,
}

/// Every rule, keyed by the chemical it produces.
pub type ReactionTable = HashMap<String, Reaction>;

/// Parse lines like "7 A, 1 B => 1 C".
pub fn parse_reactions(text: &str) -> Result<ReactionTable, String> {
    fn chemical_amount(part: &str) -> Result<(String, i64), String> {
        let (amount, chemical) = part
            .trim()
            .split_once(' ')
            .ok_or_else(|| format!("malformed chemical amount: {part:?}"))?;
        let amount = amount
            .parse()
            .map_err(|e| format!("bad amount in {part:?}: {e}"))?;
        Ok((chemical.to_string(), amount))
    }

    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (needed, produced) = line
                .split_once(" => ")
                .ok_or_else(|| format!("malformed reaction: {line:?}"))?;
            let (product, quantity) = chemical_amount(produced)?;
            let inputs = needed
                .split(", ")
                .map(chemical_amount)
                .collect::<Result<Vec<_>, _>>()?;
            Ok((product, Reaction { quantity, inputs }))
        })
        .collect()
}

/// Ore cost of producing the given amount of FUEL.
///
/// Worklist over outstanding requirements with a surplus ledger: a
/// requirement is first served from surplus, then by as many reaction runs
/// as needed, queueing the run inputs in turn. Leftovers go back to the
/// ledger so later requirements reuse them.
pub fn ore_for_fuel(reactions: &ReactionTable, fuel: i64) -> i64 {
    let mut needs: VecDeque<(String, i64)> = VecDeque::from([("FUEL".to_string(), fuel)]);
    let mut surplus: HashMap<String, i64> = HashMap::new();
    let mut ore = 0;

    while let Some((chemical, amount)) = needs.pop_front() {
        if chemical == "ORE" {
            ore += amount;
            continue;
        }

        let banked = surplus.entry(chemical.clone()).or_insert(0);
        let drawn = amount.min(*banked);
        *banked -= drawn;
        let amount = amount - drawn;
        if amount == 0 {
            continue;
        }

        let reaction = &reactions[&chemical];
        let runs = (amount + reaction.quantity - 1) / reaction.quantity;
        *surplus.entry(chemical).or_insert(0) += runs * reaction.quantity - amount;
        for (input, quantity) in &reaction.inputs {
            needs.push_back((input.clone(), quantity * runs));
        }
    }

    ore
}

/// Most FUEL producible from the given ore reserve. Ore cost grows
/// monotonically with fuel, so binary search over the yield.
pub fn max_fuel(reactions: &ReactionTable, ore: i64) -> i64 {
    let per_unit = ore_for_fuel(reactions, 1);

    // Surplus reuse means the true yield is at least the naive quotient.
    let mut low = ore / per_unit.max(1);
    let mut high = low * 2 + 1;
    while ore_for_fuel(reactions, high) <= ore {
        low = high;
        high *= 2;
    }
    while low + 1 < high {
        let mid = low + (high - low) / 2;
        if ore_for_fuel(reactions, mid) <= ore {
            low = mid;
        } else {
            high = mid;
        }
    }
    low
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
10 ORE => 10 A
1 ORE => 1 B
7 A, 1 B => 1 C
7 A, 1 C => 1 D
7 A, 1 D => 1 E
7 A, 1 E => 1 FUEL";

    const MEDIUM: &str = "\
157 ORE => 5 NZVS
165 ORE => 6 DCFZ
44 XJWVT, 5 KHKGT, 1 QDVJ, 29 NZVS, 9 GPVTF, 48 HKGWZ => 1 FUEL
12 HKGWZ, 1 GPVTF, 8 PSHF => 9 QDVJ
179 ORE => 7 PSHF
177 ORE => 5 HKGWZ
7 DCFZ, 7 PSHF => 2 XJWVT
165 ORE => 2 GPVTF
3 DCFZ, 7 NZVS, 5 HKGWZ, 10 PSHF => 8 KHKGT";

    const LARGE: &str = "\
2 VPVL, 7 FWMGM, 2 CXFTF, 11 MNCFX => 1 STKFG
17 NVRVD, 3 JNWZP => 8 VPVL
53 STKFG, 6 MNCFX, 46 VJHF, 81 HVMC, 68 CXFTF, 25 GNMV => 1 FUEL
22 VJHF, 37 MNCFX => 5 FWMGM
139 ORE => 4 NVRVD
144 ORE => 7 JNWZP
5 MNCFX, 7 RFSQX, 2 FWMGM, 2 VPVL, 19 CXFTF => 3 HVMC
5 VJHF, 7 MNCFX, 9 VPVL, 37 CXFTF => 6 GNMV
145 ORE => 6 MNCFX
1 NVRVD => 8 CXFTF
1 VJHF, 6 MNCFX => 4 RFSQX
176 ORE => 6 VJHF";

    const HUGE: &str = "\
171 ORE => 8 CNZTR
7 ZLQW, 3 BMBT, 9 XCVML, 26 XMNCP, 1 WPTQ, 2 MZWV, 1 RJRHP => 4 PLWSL
114 ORE => 4 BHXH
14 VRPVC => 6 BMBT
6 BHXH, 18 KTJDG, 12 WPTQ, 7 PLWSL, 31 FHTLT, 37 ZDVW => 1 FUEL
6 WPTQ, 2 BMBT, 8 ZLQW, 18 KTJDG, 1 XMNCP, 6 MZWV, 1 RJRHP => 6 FHTLT
15 XDBXC, 2 LTCX, 1 VRPVC => 6 ZLQW
13 WPTQ, 10 LTCX, 3 RJRHP, 14 XMNCP, 2 MZWV, 1 ZLQW => 1 ZDVW
5 BMBT => 4 WPTQ
189 ORE => 9 KTJDG
1 MZWV, 17 XDBXC, 3 XCVML => 2 XMNCP
12 VRPVC, 27 CNZTR => 2 XDBXC
15 KTJDG, 12 BHXH => 5 XCVML
3 BHXH, 2 VRPVC => 7 MZWV
121 ORE => 7 VRPVC
7 XCVML => 6 RJRHP
5 BHXH, 4 VRPVC => 5 LTCX";

    #[test]
    fn test_ore_for_one_fuel() {
        assert_eq!(ore_for_fuel(&parse_reactions(SMALL).unwrap(), 1), 31);
        assert_eq!(ore_for_fuel(&parse_reactions(MEDIUM).unwrap(), 1), 13312);
        assert_eq!(ore_for_fuel(&parse_reactions(LARGE).unwrap(), 1), 180697);
        assert_eq!(ore_for_fuel(&parse_reactions(HUGE).unwrap(), 1), 2210736);
    }

    #[test]
    fn test_surplus_is_reused() {
        // Producing 10 units of A costs one run of the 10-ORE reaction, not
        // ten.
        let reactions = parse_reactions(SMALL).unwrap();
        // 1 FUEL needs 7A + 1E -> ... -> 28 A total, i.e. 3 runs of A.
        assert_eq!(ore_for_fuel(&reactions, 1), 31);
    }

    #[test]
    fn test_max_fuel_from_a_trillion_ore() {
        let ore = 1_000_000_000_000;
        assert_eq!(max_fuel(&parse_reactions(MEDIUM).unwrap(), ore), 82892753);
        assert_eq!(max_fuel(&parse_reactions(LARGE).unwrap(), ore), 5586022);
        assert_eq!(max_fuel(&parse_reactions(HUGE).unwrap(), ore), 460664);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_reactions("10 ORE -> 10 A").is_err());
        assert!(parse_reactions("ORE => 10 A").is_err());
    }
}
