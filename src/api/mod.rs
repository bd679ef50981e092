pub mod coordinate;
pub mod ruler;
pub mod sexagesimal;

pub use coordinate::{CoordinateLabel, format_latitude, format_longitude, format_metric_pair};
pub use ruler::{Ruler, RulerConfig, RulerUnit, UnitLabels, build_ruler, ruler_for_camera};
pub use sexagesimal::{Dms, format_sexagesimal, format_sexagesimal_normalized};
