pub mod hash_file;
