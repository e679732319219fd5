use crate::key::Key;

/// A program the frontend can drive one frame at a time.
///
/// The frontend polls input, forwards every key transition through
/// `handle_key_event`, then hands `update` an RGB24 buffer of
/// `width() * height() * 3` bytes to fill before presenting it.
pub trait App {
    fn init(&mut self);
    fn update(&mut self, screen: &mut [u8]);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}
