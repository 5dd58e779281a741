pub mod plant_care;
