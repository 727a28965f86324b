/// Name plus display metadata of an exported metric.
///
/// Display strings are presentation-only and carry no behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDescriptor {
    pub name: &'static str,
    pub display_name: &'static str,
    pub display_units: &'static str,
}

impl MetricDescriptor {
    pub const fn new(
        name: &'static str,
        display_name: &'static str,
        display_units: &'static str,
    ) -> Self {
        Self {
            name,
            display_name,
            display_units,
        }
    }
}
