pub mod impl_repository;
