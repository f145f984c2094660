pub mod a001_area;
pub mod a002_campus;
pub mod a003_site_type;
pub mod a004_site;
pub mod a005_product_category;
pub mod a006_product;
pub mod a007_inventory;
pub mod a008_movement;
pub mod a009_request;
pub mod a010_request_detail;
pub mod a011_material_delivery;
pub mod a012_training_cohort;
pub mod a013_qualification;
pub mod a014_training_center;
pub mod a015_municipality;
pub mod a016_role;
pub mod a017_user;
