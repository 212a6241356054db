pub mod chart;

pub use chart::ChartView;
