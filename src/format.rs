//! Display Formatting

/// Two decimals, comma separator, trailing euro sign: `12.5` -> `"12,50 €"`
pub fn format_price(amount: f64) -> String {
    format!("{:.2} €", amount).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.5), "12,50 €");
        assert_eq!(format_price(0.0), "0,00 €");
        assert_eq!(format_price(1234.567), "1234,57 €");
    }
}
