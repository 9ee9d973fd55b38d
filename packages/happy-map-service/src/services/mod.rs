pub mod geo_hub_index;
