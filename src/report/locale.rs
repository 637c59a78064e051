use serde::{Deserialize, Serialize};

use super::currency::Currency;
use crate::core::Scenario;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "en", alias = "English")]
    English,
    #[serde(alias = "tr", alias = "Turkish", alias = "türkçe", alias = "Türkçe")]
    Turkish,
}

impl Language {
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Turkish => "tr",
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Language::English => &ENGLISH,
            Language::Turkish => &TURKISH,
        }
    }
}

/// Per-field label and help text for the six inputs.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputText {
    pub principal: &'static str,
    pub annual_rate: &'static str,
    pub years: &'static str,
    pub monthly_addition: &'static str,
    pub annual_addition_increase: &'static str,
    pub rate_variance: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnText {
    pub year: &'static str,
    pub starting_balance: &'static str,
    pub monthly_addition: &'static str,
    pub interest_earned: &'static str,
    pub ending_balance: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioText {
    pub low: &'static str,
    pub mid: &'static str,
    pub high: &'static str,
}

impl ScenarioText {
    pub fn get(&self, scenario: Scenario) -> &'static str {
        match scenario {
            Scenario::Low => self.low,
            Scenario::Mid => self.mid,
            Scenario::High => self.high,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Labels {
    pub title: &'static str,
    pub inputs: InputText,
    pub help: InputText,
    pub final_balance_section: &'static str,
    pub final_balance: ScenarioText,
    pub data_heading: ScenarioText,
    pub series_name: ScenarioText,
    pub columns: ColumnText,
    pub plot_title: &'static str,
    pub x_axis_title: &'static str,
    pub y_axis_base: &'static str,
    pub form_error: &'static str,
    pub calculate_button: &'static str,
    /// Markdown sidebar text: overview, feature list and disclaimer.
    pub about: &'static str,
}

impl Labels {
    pub fn y_axis_title(&self, currency: Currency) -> String {
        format!("{} ({})", self.y_axis_base, currency.symbol())
    }
}

static ENGLISH: Labels = Labels {
    title: "Compound Interest Calculator with Interest Rate Variance",
    inputs: InputText {
        principal: "Initial Principal",
        annual_rate: "Annual Interest Rate (%)",
        years: "Number of Years",
        monthly_addition: "Monthly Addition",
        annual_addition_increase: "Annual Addition Increase Rate (%)",
        rate_variance: "Interest Rate Variance (%)",
    },
    help: InputText {
        principal: "Must be greater than 0",
        annual_rate: "Annual interest rate in percentage between 1-100%",
        years: "Investment period in years (must be a positive integer)",
        monthly_addition: "Monthly contribution amount (must be 0 or greater)",
        annual_addition_increase: "Annual increase rate for the monthly addition (must be 0 or greater)",
        rate_variance: "Interest rate variance percentage between 0-100%",
    },
    final_balance_section: "The final balance with",
    final_balance: ScenarioText {
        low: "Low Interest Rate:",
        mid: "Mid Interest Rate:",
        high: "High Interest Rate:",
    },
    data_heading: ScenarioText {
        low: "Data for Low Interest Rate",
        mid: "Data for Mid Interest Rate",
        high: "Data for High Interest Rate",
    },
    series_name: ScenarioText {
        low: "Low Interest Rate",
        mid: "Mid Interest Rate",
        high: "High Interest Rate",
    },
    columns: ColumnText {
        year: "Year",
        starting_balance: "Starting Balance",
        monthly_addition: "Monthly Addition",
        interest_earned: "Interest Earned",
        ending_balance: "Ending Balance",
    },
    plot_title: "Ending Balance Over Time with Interest Rate Variance",
    x_axis_title: "Year",
    y_axis_base: "Ending Balance",
    form_error: "Please fill all the input fields to calculate the compound interest.",
    calculate_button: "Calculate",
    about: "## Compound Interest Calculator with Interest Rate Variance
This application helps you calculate the compound interest with varying interest rates over time.
You can input your initial principal, annual interest rate, investment period, monthly additions,
and annual addition increase rate to see how your investment grows over time.

### Features:
- Calculate compound interest with low, mid, and high interest rates.
- Visualize the growth of your investment with interactive plots.
- View detailed data for each interest rate scenario.

Please note that, values produced are for illustrative purposes only and do not constitute advice.
",
};

static TURKISH: Labels = Labels {
    title: "Faiz Oranı Varyansı ile Bileşik Faiz Hesaplayıcı",
    inputs: InputText {
        principal: "Başlangıç Ana Parası",
        annual_rate: "Yıllık Faiz Oranı (%)",
        years: "Yıl Sayısı",
        monthly_addition: "Aylık Ek Yatırım",
        annual_addition_increase: "Yıllık Ek Yatırım Artış Oranı (%)",
        rate_variance: "Faiz Oranı Varyansı (%)",
    },
    help: InputText {
        principal: "0'dan büyük olmalıdır",
        annual_rate: "1-100% arasında yıllık faiz oranı",
        years: "Yatırım süresi (pozitif tam sayı olmalıdır)",
        monthly_addition: "Aylık ek yatırım miktarı (0 veya daha büyük olmalıdır)",
        annual_addition_increase: "Aylık katkı artış oranı (0 veya daha büyük olmalıdır)",
        rate_variance: "Faiz oranı değişim yüzdesi (0-100% arası)",
    },
    final_balance_section: "Nihai Bakiye ile",
    final_balance: ScenarioText {
        low: "Düşük Faiz Oranı:",
        mid: "Orta Faiz Oranı:",
        high: "Yüksek Faiz Oranı:",
    },
    data_heading: ScenarioText {
        low: "Düşük Faiz Oranı için Veriler",
        mid: "Orta Faiz Oranı için Veriler",
        high: "Yüksek Faiz Oranı için Veriler",
    },
    series_name: ScenarioText {
        low: "Düşük Faiz Oranı",
        mid: "Orta Faiz Oranı",
        high: "Yüksek Faiz Oranı",
    },
    columns: ColumnText {
        year: "Yıl",
        starting_balance: "Başlangıç Bakiyesi",
        monthly_addition: "Aylık Ek Yatırım",
        interest_earned: "Kazanılan Faiz",
        ending_balance: "Nihai Bakiye",
    },
    plot_title: "Faiz Oranı Varyansı ile Zaman İçinde Nihai Bakiye",
    x_axis_title: "Yıl",
    y_axis_base: "Nihai Bakiye",
    form_error: "Bileşik faizi hesaplamak için tüm giriş alanlarını doldurunuz.",
    calculate_button: "Hesapla",
    about: "## Bileşik Faiz/Getiri Hesaplayıcısı (Faiz Oranı Varyasyonu ile)
Bu uygulama, zaman içindeki değişen faiz oranlarıyla bileşik faizi hesaplamanıza yardımcı olur.
Başlangıç ana paranızı, yıllık faiz oranınızı, yatırım sürenizi, aylık eklemelerinizi ve yıllık ekleme artış oranınızı girerek yatırımınızın zaman içinde nasıl büyüdüğünü görebilirsiniz.

### Özellikler:
- Düşük, orta ve yüksek faiz oranlarıyla bileşik faizi hesaplayın.
- Yatırımınızın büyümesini interaktif grafiklerle görselleştirin.
- Her faiz oranı senaryosu için ayrıntılı verileri görüntüleyin.

Lütfen üretilen değerlerin yalnızca örnek amaçlı olduğunu ve tavsiye niteliğinde olmadığını unutmayın.
",
};
