use copyctor::CopyConstructor;

#[derive(CopyConstructor)]
#[copy_constructor(depth = "One")]
pub struct Tree {
    pub left: u8,
}

fn main() {}
