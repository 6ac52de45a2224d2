use copyctor::CopyConstructor;

pub struct Cloner;

impl Cloner {
    pub fn copy<T: Clone>(value: &Option<T>) -> Option<T> {
        value.clone()
    }
}

#[derive(CopyConstructor)]
pub struct Cell<T, U>
where
    U: Copy,
{
    pub value: T,

    #[copy_constructor(copy(using = "Cloner"))]
    pub backup: Option<U>,

    #[copy_constructor(exclude)]
    pub dirty: bool,
}

fn main() {
    let cell = Cell {
        value: String::from("v"),
        backup: Some(1_u8),
        dirty: true,
    };

    let copy = Cell::copy_from(&cell);
    assert_eq!(copy.value, "v");
    assert_eq!(copy.backup, Some(1));
    assert!(!copy.dirty);
}
