use copyctor::prelude::*;

#[derive(CopyConstructor)]
struct Empty {}

fn main() {
    let _ = Empty::copy_from(&Empty {});
}
