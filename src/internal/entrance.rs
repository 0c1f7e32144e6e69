pub mod ensure_artifact;
