use lazy_static::lazy_static;

/// Presentation and exploration parameters.
///
/// None of these affect the regression itself, only how results are
/// sampled, framed and printed.
#[derive(Clone,Debug,PartialEq)]
pub struct Settings {
    // decimal places kept by the equation formatter
    pub precision:usize,
    // points generated for a plotted curve
    pub curve_steps:usize,
    // fraction of the sample x-range added on each side of the plot
    pub plot_padding:f64,
    // fraction of the sample x-range added on each side of the tangent explorer
    pub explore_padding:f64,
    // explorer interval is divided into this many steps
    pub explore_steps:usize,
    // tangent segment length as a fraction of the explorer interval
    pub tangent_span_fraction:f64,
}

//free parameters, that can be tweaked
lazy_static! {
    static ref DEFAULT_SETTINGS:Settings = Settings {
        precision:3,
        curve_steps:100,
        plot_padding:0.2,
        explore_padding:0.1,
        explore_steps:100,
        tangent_span_fraction:0.4,
    };
}

impl Default for Settings {
    fn default() -> Self {
        DEFAULT_SETTINGS.clone()
    }
}
