use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// Owning handle of an adapted container.
///
/// Adapters, views and iterators all keep a strong handle, so the container is released only
/// after the last object observing it is gone.
#[derive(Debug, Default)]
pub struct Shared<C>(Rc<RefCell<C>>);

impl<C> Shared<C> {
    pub fn new(container: C) -> Self {
        Self(Rc::new(RefCell::new(container)))
    }

    pub fn borrow(&self) -> Ref<'_, C> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, C> {
        self.0.borrow_mut()
    }

    /// Number of live handles pinning the container.
    pub fn pins(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Take the container back if this is the last handle.
    pub fn try_unwrap(self) -> Result<C, Self> {
        Rc::try_unwrap(self.0)
            .map(RefCell::into_inner)
            .map_err(Self)
    }
}

impl<C> Clone for Shared<C> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<C> From<C> for Shared<C> {
    fn from(container: C) -> Self {
        Self::new(container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pins() {
        let first = Shared::new(vec![1, 2, 3]);
        assert_eq!(first.pins(), 1);

        let second = first.clone();
        assert!(first.ptr_eq(&second));
        assert_eq!(first.pins(), 2);

        second.borrow_mut().push(4);
        assert_eq!(first.borrow().len(), 4);

        let first = first.try_unwrap().unwrap_err();
        drop(second);
        assert_eq!(first.try_unwrap().unwrap(), [1, 2, 3, 4]);
    }
}
