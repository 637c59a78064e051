use serde::{Deserialize, Serialize};

/// Display currency. Amounts are never converted; this only picks the symbol.
/// Deserializes from an ISO code in any case or the bare symbol.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Currency {
    #[default]
    Try,
    Usd,
    Eur,
    Gbp,
}

impl TryFrom<String> for Currency {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Currency::parse(&value).ok_or_else(|| {
            format!("unknown currency `{value}`, expected one of TRY, USD, EUR, GBP")
        })
    }
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Try, Currency::Usd, Currency::Eur, Currency::Gbp];

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Try => "₺",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Try => "TRY",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    /// Accepts an ISO code in any case or the bare symbol.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(value) || c.symbol() == value)
    }

    /// Selector label, e.g. `$ - USD`.
    pub fn label(self) -> String {
        format!("{} - {}", self.symbol(), self.code())
    }
}

/// Two decimals with comma-grouped thousands: `1234567.891` -> `1,234,567.89`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Symbol followed by the formatted amount; the sign sits after the symbol.
pub fn format_money(currency: Currency, value: f64) -> String {
    format!("{}{}", currency.symbol(), format_amount(value))
}
