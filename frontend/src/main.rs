// The wasm entry point lives in lib.rs behind #[wasm_bindgen(start)];
// trunk still wants a bin target.
fn main() {}
