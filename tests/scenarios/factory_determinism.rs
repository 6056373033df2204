//! Test: Factory Determinism - factories always build the same step shape

use crate::helpers::*;
use pipeline_patterns::core::{
    AdvancedFactory, BasicFactory, BuildStep, DecoratedStep, PipelineFactory, TestStep,
};

#[test]
fn test_basic_factory_builds_plain_build_step() {
    for _ in 0..3 {
        let step = BasicFactory.create_step();
        assert_eq!(invoke_step(step.as_ref()), invoke_step(&BuildStep));
    }
}

#[test]
fn test_advanced_factory_builds_decorated_test_step() {
    let expected = invoke_step(&DecoratedStep::new(TestStep));
    for _ in 0..3 {
        let step = AdvancedFactory.create_step();
        assert_eq!(invoke_step(step.as_ref()), expected);
    }
}

#[test]
fn test_factory_chosen_at_runtime() {
    fn pick(advanced: bool) -> Box<dyn PipelineFactory> {
        if advanced {
            Box::new(AdvancedFactory)
        } else {
            Box::new(BasicFactory)
        }
    }

    let basic = invoke_step(pick(false).create_step().as_ref());
    let advanced = invoke_step(pick(true).create_step().as_ref());

    assert_eq!(basic.lines().count(), 1);
    assert_eq!(advanced.lines().count(), 2);
    assert_eq!(advanced.lines().last(), Some(DECORATOR_LINE));
}
