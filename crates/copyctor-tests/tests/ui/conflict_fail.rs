use copyctor::CopyConstructor;

#[derive(CopyConstructor)]
pub struct Bag {
    #[copy_constructor(reference, copy(using = "Cloner"))]
    pub items: Vec<u8>,
}

fn main() {}
