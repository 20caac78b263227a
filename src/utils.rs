//! Utils

use std::path::PathBuf;

use clap::Parser;

/// Arguments for the invoice example
#[derive(Debug, Parser)]
pub struct ExampleInvoiceArgs {
    /// Fixture set to use for the inventory & cart
    #[clap(short, long, default_value = "groceries")]
    pub fixture: String,

    /// Directory holding the `products`, `coupons` and `carts` fixture folders
    #[clap(short, long, default_value = "./fixtures")]
    pub base_path: PathBuf,
}

/// Spell `n` as an English ordinal: `1st`, `2nd`, `3rd`, `4th`, `11th`, `22nd`.
pub fn as_ordinal(n: u32) -> String {
    let suffix = if (11..=13).contains(&(n % 100)) {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };

    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_three_have_their_own_suffix() {
        assert_eq!(as_ordinal(1), "1st");
        assert_eq!(as_ordinal(2), "2nd");
        assert_eq!(as_ordinal(3), "3rd");
    }

    #[test]
    fn teens_always_end_in_th() {
        for n in 4..=20 {
            assert_eq!(as_ordinal(n), format!("{n}th"), "{n} should end in th");
        }
    }

    #[test]
    fn past_twenty_follows_the_last_digit() {
        assert_eq!(as_ordinal(21), "21st");
        assert_eq!(as_ordinal(22), "22nd");
        assert_eq!(as_ordinal(23), "23rd");
        assert_eq!(as_ordinal(24), "24th");
        assert_eq!(as_ordinal(30), "30th");
        assert_eq!(as_ordinal(101), "101st");
        assert_eq!(as_ordinal(112), "112th");
    }

    #[test]
    fn zero_ends_in_th() {
        assert_eq!(as_ordinal(0), "0th");
    }

    #[test]
    fn example_args_use_defaults() {
        let args = ExampleInvoiceArgs::parse_from(["invoice"]);

        assert_eq!(args.fixture, "groceries");
        assert_eq!(args.base_path, PathBuf::from("./fixtures"));
    }
}
