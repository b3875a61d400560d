/// Something that can render itself. Declared for completeness; nothing in the
/// crate implements it.
pub trait Printable {
    fn print(&self);
}
