pub mod scene_document;
