mod stats_row;
mod task_editor;
mod task_filters;
mod task_list;
mod task_list_row;

pub use stats_row::StatsRow;
pub use task_editor::TaskEditor;
pub use task_filters::TaskFilters;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
