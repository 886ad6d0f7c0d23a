pub mod audio;
pub mod google;
pub mod llm;
pub mod observability;
pub mod persistence;
pub mod storage;
pub mod tts;
