/// Rendering: sidebar controls, the filtered table and the four chart views.
pub mod charts;
pub mod format;
pub mod panels;
pub mod table;
pub mod treemap;
