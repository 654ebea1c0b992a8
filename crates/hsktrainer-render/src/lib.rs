//! hsktrainer-render — terminal and HTML rendering of quiz views.

pub mod html;
pub mod text;
