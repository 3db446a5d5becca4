pub mod canvas_view;
pub mod dropdown;
pub mod form;
pub mod listbox;
pub mod slider;
pub mod spinbox;
pub mod status_bar;
pub mod table_view;
pub mod toolbar;
