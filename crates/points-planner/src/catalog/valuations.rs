use serde::Serialize;

/// Minimum value per point (in dollars) worth chasing on airline transfers.
pub const AIRLINE_FLOOR: f64 = 0.014;
/// Typical value per Hilton Honors point.
pub const HILTON_TYPICAL: f64 = 0.005;
/// Typical value per Marriott Bonvoy point.
pub const MARRIOTT_TYPICAL: f64 = 0.007;
/// Target value per World of Hyatt point.
pub const HYATT_FLOOR: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Valuation {
    pub program: &'static str,
    pub label: &'static str,
    pub value_per_point: f64,
}

pub(crate) static VALUATIONS: [Valuation; 4] = [
    Valuation {
        program: "airline",
        label: "Airline transfer floor",
        value_per_point: AIRLINE_FLOOR,
    },
    Valuation {
        program: "hilton",
        label: "Hilton Honors typical",
        value_per_point: HILTON_TYPICAL,
    },
    Valuation {
        program: "marriott",
        label: "Marriott Bonvoy typical",
        value_per_point: MARRIOTT_TYPICAL,
    },
    Valuation {
        program: "hyatt",
        label: "World of Hyatt target",
        value_per_point: HYATT_FLOOR,
    },
];

/// Renders a per-point dollar value as cents with a fixed number of decimals.
pub fn cents(value_per_point: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value_per_point * 100.0)
}

/// Whole-cent rendering, rounding halves away from zero.
pub fn rounded_cents(value_per_point: f64) -> String {
    format!("{}", (value_per_point * 100.0).round() as i64)
}

impl Valuation {
    pub fn cents_label(&self) -> String {
        format!("{}¢/pt", cents(self.value_per_point, 1))
    }
}
