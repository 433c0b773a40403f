/// Handle for the bindings visible to `eval`.
///
/// Step 0 has no bindings; the handle is only threaded through the
/// pipeline so later steps can give it a symbol table and an outer env.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Env {
    _private: (),
}

impl Env {
    pub fn new() -> Env {
        Env { _private: () }
    }
}
