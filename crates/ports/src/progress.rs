// crates/ports/src/progress.rs
pub trait RunNotifier {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}
