use copyctor::CopyConstructor;

#[derive(CopyConstructor)]
union Bits {
    int: u32,
    float: f32,
}

fn main() {}
