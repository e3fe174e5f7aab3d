pub mod unit_local_store_pages;
