pub mod analysis;
pub mod chart;
pub mod record;
pub mod shell;
pub mod store;

pub use analysis::{counts_by_class, counts_by_section, modal_grade_per_class};
pub use chart::{
    CLASS_CHART_FILE, ChartError, ChartResult, SECTION_CHART_FILE, render_class_bar_chart,
    render_section_pie_chart,
};
pub use record::{HEADERS, RecordError, RecordResult, Student, StudentPatch, parse_roll_no};
pub use shell::{Shell, ShellError, ShellResult};
pub use store::{StoreError, StoreResult, StudentStore};
