pub mod input_translator;
