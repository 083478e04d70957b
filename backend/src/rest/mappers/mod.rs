pub mod bank_mapper;
