pub mod defaults;
pub mod entities;
pub mod icons;
pub mod ids;
pub mod views;
