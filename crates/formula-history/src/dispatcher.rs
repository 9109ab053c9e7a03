/// Applies step payloads to the document the history tracks.
pub trait Dispatcher<T> {
    fn apply(&mut self, data: &T);
    fn revert(&mut self, data: &T);
}
