mod fake_compose;

pub use fake_compose::FakeCompose;
pub use test_layout::TestLayout;
