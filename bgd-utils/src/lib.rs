//! Shared formatting helpers for BGD crates.

/// Number and label formatting for dashboard display
pub mod format {
    /// Currencies the dashboard knows how to prefix.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Currency {
        Brl,
        Usd,
        Eur,
    }

    impl Currency {
        /// Display symbol for the currency.
        pub fn symbol(self) -> &'static str {
            match self {
                Currency::Brl => "R$",
                Currency::Usd => "$",
                Currency::Eur => "€",
            }
        }
    }

    /// Insert comma thousands separators into the rounded integer value.
    pub fn group_thousands(value: f64) -> String {
        let negative = value < 0.0;
        let digits = (value.abs().round() as u64).to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        if negative {
            format!("-{out}")
        } else {
            out
        }
    }

    /// Format a monetary value with magnitude abbreviation in the given currency.
    ///
    /// Abbreviated tiers (T/B/M/K) carry one decimal; values below 1,000
    /// render as a grouped integer. The symbol prefix is always present.
    pub fn currency_in(currency: Currency, value: f64) -> String {
        let symbol = currency.symbol();
        let magnitude = value.abs();
        if magnitude >= 1e12 {
            format!("{symbol} {:.1}T", value / 1e12)
        } else if magnitude >= 1e9 {
            format!("{symbol} {:.1}B", value / 1e9)
        } else if magnitude >= 1e6 {
            format!("{symbol} {:.1}M", value / 1e6)
        } else if magnitude >= 1e3 {
            format!("{symbol} {:.1}K", value / 1e3)
        } else {
            format!("{symbol} {}", group_thousands(value))
        }
    }

    /// Format a monetary value in BRL, the dashboard's fixed currency.
    pub fn currency(value: f64) -> String {
        currency_in(Currency::Brl, value)
    }

    /// Format a plain count with magnitude abbreviation and no symbol.
    ///
    /// Abbreviated tiers carry no decimals; the trillion tier is reserved
    /// for currency values.
    pub fn count(value: f64) -> String {
        let magnitude = value.abs();
        if magnitude >= 1e9 {
            format!("{:.0}B", value / 1e9)
        } else if magnitude >= 1e6 {
            format!("{:.0}M", value / 1e6)
        } else if magnitude >= 1e3 {
            format!("{:.0}K", value / 1e3)
        } else {
            group_thousands(value)
        }
    }

    /// Format a fraction as a signed percentage: 0.123 -> "+12.3%".
    pub fn percent(value: f64) -> String {
        if value == 0.0 {
            "0%".to_string()
        } else {
            format!("{:+.1}%", value * 100.0)
        }
    }

    /// Format a multiplier ratio: 5.0 -> "5.0x".
    pub fn ratio(value: f64) -> String {
        format!("{value:.1}x")
    }

    /// Truncate a label to `max` characters, appending an ellipsis when cut.
    ///
    /// Operates on characters, not bytes, so multibyte names survive.
    pub fn truncate_label(label: &str, max: usize) -> String {
        if label.chars().count() <= max {
            label.to_string()
        } else {
            let mut out: String = label.chars().take(max).collect();
            out.push('…');
            out
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_group_thousands() {
            assert_eq!(group_thousands(0.0), "0");
            assert_eq!(group_thousands(950.0), "950");
            assert_eq!(group_thousands(1234.0), "1,234");
            assert_eq!(group_thousands(1_234_567.0), "1,234,567");
            assert_eq!(group_thousands(-4500.0), "-4,500");
        }

        #[test]
        fn test_currency_tiers() {
            assert_eq!(currency(2_500_000_000_000.0), "R$ 2.5T");
            assert_eq!(currency(1_500_000_000.0), "R$ 1.5B");
            assert_eq!(currency(3_200_000.0), "R$ 3.2M");
            assert_eq!(currency(47_800.0), "R$ 47.8K");
            assert_eq!(currency(950.0), "R$ 950");
        }

        #[test]
        fn test_currency_symbols() {
            assert_eq!(currency_in(Currency::Usd, 1_000_000.0), "$ 1.0M");
            assert_eq!(currency_in(Currency::Eur, 500.0), "€ 500");
        }

        #[test]
        fn test_count_tiers() {
            assert_eq!(count(950.0), "950");
            assert_eq!(count(12_300.0), "12K");
            assert_eq!(count(45_000_000.0), "45M");
            assert_eq!(count(2_100_000_000.0), "2B");
            // No trillion tier for counts: falls through to billions.
            assert_eq!(count(1_500_000_000_000.0), "1500B");
        }

        #[test]
        fn test_percent() {
            assert_eq!(percent(0.0), "0%");
            assert_eq!(percent(0.123), "+12.3%");
            assert_eq!(percent(-0.04), "-4.0%");
        }

        #[test]
        fn test_ratio() {
            assert_eq!(ratio(5.0), "5.0x");
            assert_eq!(ratio(1.25), "1.2x");
        }

        #[test]
        fn test_truncate_label() {
            assert_eq!(truncate_label("Bahia", 20), "Bahia");
            assert_eq!(truncate_label("12345678901234567890", 20), "12345678901234567890");
            assert_eq!(
                truncate_label("Rio Grande do Norte e Sul", 20),
                "Rio Grande do Norte …"
            );
            // Multibyte characters count as one.
            assert_eq!(truncate_label("São Paulo", 20), "São Paulo");
        }
    }
}
