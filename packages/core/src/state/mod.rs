// Состояние витрины

pub mod app;
pub mod theme;
