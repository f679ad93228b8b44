// src/era.rs
//! Band eras, derived from a show's year alone.
//!
//! | Years        | Era        |
//! |--------------|------------|
//! | 1983–2000    | `1.0`      |
//! | 2001         | `Hiatus 1` |
//! | 2002–2004    | `2.0`      |
//! | 2005–2008    | `Hiatus 2` |
//! | 2009–2020    | `3.0`      |
//! | 2021 onwards | `4.0`      |
//!
//! Anything else, including the `0` used for unparseable years and any year
//! before 1983, is `Unknown`.

use std::fmt;

/// Declaration order is chronological; summaries sort by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Era {
    One,
    Hiatus1,
    Two,
    Hiatus2,
    Three,
    Four,
    Unknown,
}

impl Era {
    pub const ALL: [Era; 7] = [
        Era::One, Era::Hiatus1, Era::Two, Era::Hiatus2, Era::Three, Era::Four, Era::Unknown,
    ];

    pub fn from_year(year: i32) -> Era {
        match year {
            1983..=2000 => Era::One,
            2001 => Era::Hiatus1,
            2002..=2004 => Era::Two,
            2005..=2008 => Era::Hiatus2,
            2009..=2020 => Era::Three,
            2021.. => Era::Four,
            _ => Era::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Era::One => "1.0",
            Era::Hiatus1 => "Hiatus 1",
            Era::Two => "2.0",
            Era::Hiatus2 => "Hiatus 2",
            Era::Three => "3.0",
            Era::Four => "4.0",
            Era::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(Era::from_year(1983).label(), "1.0");
        assert_eq!(Era::from_year(2000).label(), "1.0");
        assert_eq!(Era::from_year(2001).label(), "Hiatus 1");
        assert_eq!(Era::from_year(2002).label(), "2.0");
        assert_eq!(Era::from_year(2004).label(), "2.0");
        assert_eq!(Era::from_year(2005).label(), "Hiatus 2");
        assert_eq!(Era::from_year(2008).label(), "Hiatus 2");
        assert_eq!(Era::from_year(2009).label(), "3.0");
        assert_eq!(Era::from_year(2020).label(), "3.0");
        assert_eq!(Era::from_year(2021).label(), "4.0");
        assert_eq!(Era::from_year(2099).label(), "4.0");
    }

    #[test]
    fn out_of_range_is_unknown() {
        assert_eq!(Era::from_year(0), Era::Unknown);
        assert_eq!(Era::from_year(1982), Era::Unknown);
        assert_eq!(Era::from_year(-5), Era::Unknown);
        assert_eq!(Era::from_year(i32::MIN), Era::Unknown);
        assert_eq!(Era::from_year(i32::MAX), Era::Four);
    }

    #[test]
    fn labels_are_the_closed_set() {
        let labels: Vec<&str> = Era::ALL.iter().map(|e| e.label()).collect();
        assert_eq!(labels, ["1.0", "Hiatus 1", "2.0", "Hiatus 2", "3.0", "4.0", "Unknown"]);
    }
}
