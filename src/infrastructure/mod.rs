// Infrastructure layer module
// Contains the storage adapters behind the domain's persistence ports

pub mod repositories;
