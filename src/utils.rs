use alloc::vec::Vec;

pub trait SeqExt<T> {
    fn has_value<U: ?Sized>(&self, to_check: &U) -> bool
    where
        T: PartialEq<U>;

    fn index_of<U: ?Sized>(&self, to_check: &U) -> Option<usize>
    where
        T: PartialEq<U>;

    fn indices_of<U: ?Sized>(&self, to_check: &U) -> Vec<usize>
    where
        T: PartialEq<U>;
}

impl<T> SeqExt<T> for [T] {
    fn has_value<U: ?Sized>(&self, value_to_check: &U) -> bool
    where
        T: PartialEq<U>,
    {
        self.index_of(value_to_check).is_some()
    }

    fn index_of<U: ?Sized>(&self, value_to_check: &U) -> Option<usize>
    where
        T: PartialEq<U>,
    {
        self.iter().position(|value| value == value_to_check)
    }

    fn indices_of<U: ?Sized>(&self, value_to_check: &U) -> Vec<usize>
    where
        T: PartialEq<U>,
    {
        self.iter()
            .enumerate()
            .filter(|(_, value)| *value == value_to_check)
            .map(|(index, _)| index)
            .collect()
    }
}
