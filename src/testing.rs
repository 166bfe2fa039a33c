pub mod profile_contract;
