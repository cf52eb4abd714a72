//! 组件定义解析与切面的集成测试

use di_abstractions::{
    Advice, AdviceResult, BeanDefinition, BeanDefinitionResolver, Callback, InjectType,
    InjectionMetadataProvider, JoinPoint, Pointcut, Target,
};
use di_impl::{
    AnnotationPointcut, Aspect, BeanDefinitionRegistry, DefaultBeanDefinitionResolver,
    DefinitionSettings, MethodNamePointcut, NoOpAdvice,
};
use ioc_common::{
    Annotation, AopError, Bean, BeanClass, ConfigSection, ConstructorInfo, DependencyError,
    FactoryBean, FieldInfo, MethodInfo, TypeInfo,
};
use std::any::{Any, TypeId};
use std::sync::{Arc, Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// 初始化测试日志系统（只初始化一次）
fn init_test_logger() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

struct Bar;
struct Clock;

/// 字段注入的组件：显式标记的 bar 以及同类型但未标记的 helper
struct Foo;

impl Bean for Foo {
    fn bean_class() -> BeanClass {
        BeanClass::of::<Self>()
            .with_field(FieldInfo::of::<Bar>("bar").annotated(Annotation::INJECT))
            .with_field(FieldInfo::of::<Bar>("helper"))
            .with_field(FieldInfo::of::<String>("name"))
    }
}

/// 构造器注入的组件
struct OrderService;

impl Bean for OrderService {
    fn bean_class() -> BeanClass {
        BeanClass::of::<Self>()
            .with_constructor(
                ConstructorInfo::new()
                    .with_parameter(TypeInfo::of::<Bar>())
                    .with_parameter(TypeInfo::of::<Clock>())
                    .annotated(Annotation::INJECT),
            )
            .with_field(FieldInfo::of::<Bar>("bar").annotated(Annotation::INJECT))
    }
}

/// 通过 setter 声明依赖的组件
struct Scheduler;

impl Bean for Scheduler {
    fn bean_class() -> BeanClass {
        BeanClass::of::<Self>()
            .with_method(
                MethodInfo::new("set_clock")
                    .with_parameter(TypeInfo::of::<Clock>())
                    .annotated(Annotation::INJECT),
            )
            .with_field(FieldInfo::of::<Clock>("clock"))
            .with_field(FieldInfo::of::<Clock>("fallback_clock"))
            .with_field(FieldInfo::of::<Bar>("bar"))
    }
}

/// 注入方法参数个数错误的组件
struct Broken;

impl Bean for Broken {
    fn bean_class() -> BeanClass {
        BeanClass::of::<Self>().with_method(
            MethodInfo::new("wire")
                .with_parameter(TypeInfo::of::<Bar>())
                .with_parameter(TypeInfo::of::<Clock>())
                .annotated(Annotation::INJECT),
        )
    }
}

struct ClockFactory;

impl FactoryBean for ClockFactory {
    fn object_type(&self) -> TypeInfo {
        TypeInfo::of::<Clock>()
    }

    fn create_object(&self) -> Result<Arc<dyn Any + Send + Sync>, DependencyError> {
        Ok(Arc::new(Clock))
    }
}

impl Bean for ClockFactory {
    fn bean_class() -> BeanClass {
        BeanClass::of::<Self>().implementing::<dyn FactoryBean>()
    }
}

fn sorted_field_names(definition: &dyn BeanDefinition) -> Vec<String> {
    let mut names: Vec<String> = definition
        .inject_fields()
        .iter()
        .map(|f| f.name.clone())
        .collect();
    names.sort();
    names
}

#[test]
fn test_unmarked_field_of_eligible_type_is_injected() {
    init_test_logger();
    let resolver = DefaultBeanDefinitionResolver::<di_impl::AnnotationMetadataProvider>::default();

    let definition = resolver.resolve_bean::<Foo>().unwrap();
    assert!(definition.inject_constructor().is_none());
    assert_eq!(sorted_field_names(definition.as_ref()), vec!["bar", "helper"]);
    assert_eq!(definition.resolved_inject_mode(), InjectType::InjectField);
}

#[test]
fn test_constructor_takes_priority() {
    init_test_logger();
    let resolver = DefaultBeanDefinitionResolver::<di_impl::AnnotationMetadataProvider>::default();

    let definition = resolver.resolve_bean::<OrderService>().unwrap();
    let constructor = definition.inject_constructor().unwrap();
    assert_eq!(constructor.parameter_types.len(), 2);
    assert!(definition.inject_fields().is_empty());
    assert_eq!(definition.resolved_inject_mode(), InjectType::InjectConstructor);
}

#[test]
fn test_setter_parameter_type_selects_fields() {
    init_test_logger();
    let resolver = DefaultBeanDefinitionResolver::<di_impl::AnnotationMetadataProvider>::default();

    let definition = resolver.resolve_bean::<Scheduler>().unwrap();
    assert_eq!(
        sorted_field_names(definition.as_ref()),
        vec!["clock", "fallback_clock"]
    );
    // 方法注入尚未支持
    assert!(definition.method().is_none());
    assert_ne!(definition.resolved_inject_mode(), InjectType::InjectMethod);
}

#[test]
fn test_invalid_setter_fails_resolution() {
    init_test_logger();
    let registry = BeanDefinitionRegistry::new();

    let err = registry.register_bean::<Broken>().unwrap_err();
    assert!(matches!(err, DependencyError::InvalidConfiguration { .. }));
    assert!(!registry.contains(TypeId::of::<Broken>()));
}

#[test]
fn test_factory_bean_flag() {
    let registry = BeanDefinitionRegistry::new();
    assert!(registry
        .register_bean::<ClockFactory>()
        .unwrap()
        .is_factory_bean_type());
    assert!(!registry.register_bean::<Foo>().unwrap().is_factory_bean_type());
    assert_eq!(
        registry
            .get_required::<ClockFactory>()
            .unwrap()
            .resolved_inject_mode(),
        InjectType::InjectNo
    );
}

/// 只认构造器的提供者，用于验证解析器只依赖提供者的结果
struct ConstructorOnlyProvider;

impl InjectionMetadataProvider for ConstructorOnlyProvider {
    fn injected_constructor(&self, class: &BeanClass) -> Option<ConstructorInfo> {
        class.constructors.first().cloned()
    }

    fn injected_methods(&self, _class: &BeanClass) -> Vec<MethodInfo> {
        Vec::new()
    }

    fn injected_fields(&self, _class: &BeanClass) -> Vec<FieldInfo> {
        Vec::new()
    }
}

#[test]
fn test_custom_provider() {
    let registry = BeanDefinitionRegistry::with_provider(ConstructorOnlyProvider);

    let definition = registry.register_bean::<Foo>().unwrap();
    assert_eq!(definition.resolved_inject_mode(), InjectType::InjectNo);

    let class = BeanClass::of::<Bar>().with_constructor(ConstructorInfo::new());
    let definition = registry.register(&class).unwrap();
    assert_eq!(definition.resolved_inject_mode(), InjectType::InjectConstructor);
}

#[test]
fn test_registry_from_json_settings() {
    init_test_logger();
    let root = ConfigSection::from_json_str(
        r#"{
            "beans": {
                "definitions": {
                    "inject_annotations": ["Autowired"],
                    "cache_definitions": true
                }
            }
        }"#,
    )
    .unwrap();
    let settings = DefinitionSettings::from_section(&root).unwrap();
    let registry = BeanDefinitionRegistry::from_settings(settings).unwrap();

    let autowired = BeanClass::of::<Clock>()
        .with_field(FieldInfo::of::<Bar>("bar").annotated(Annotation::new("Autowired")));
    let definition = registry.register(&autowired).unwrap();
    assert_eq!(definition.resolved_inject_mode(), InjectType::InjectField);

    // Inject 不在配置中，Foo 不再有注入点
    let definition = registry.register_bean::<Foo>().unwrap();
    assert_eq!(definition.resolved_inject_mode(), InjectType::InjectNo);
    assert_eq!(registry.definitions().len(), 2);
    assert!(registry.get_by_name("Foo").is_some());
    assert!(registry.get_by_name(std::any::type_name::<Foo>()).is_some());
}

/// 记录调用顺序的通知
#[derive(Debug)]
struct RecordingAdvice {
    name: &'static str,
    log: Arc<Mutex<Vec<String>>>,
}

impl Advice for RecordingAdvice {
    fn name(&self) -> &str {
        self.name
    }

    fn invoke(
        &self,
        join_point: &JoinPoint<'_>,
        proceed: &mut dyn FnMut() -> AdviceResult,
    ) -> AdviceResult {
        self.log
            .lock()
            .unwrap()
            .push(format!("{} -> {}", self.name, join_point.signature()));
        proceed()
    }
}

/// 拒绝没有组件名称的目标，不再继续执行
#[derive(Debug)]
struct NamedTargetGuard;

impl Advice for NamedTargetGuard {
    fn name(&self) -> &str {
        "NamedTargetGuard"
    }

    fn invoke(
        &self,
        join_point: &JoinPoint<'_>,
        proceed: &mut dyn FnMut() -> AdviceResult,
    ) -> AdviceResult {
        if join_point.target.bean_name.is_none() {
            return Err(AopError::AdviceFailed {
                advice: self.name().to_string(),
                message: format!("{} 没有组件名称", join_point.signature()),
            });
        }
        proceed()
    }
}

/// 按回调顺序嵌套执行，模拟外部代理分发。`cancel` 开头的目标方法总是失败
fn dispatch(callbacks: &[Callback], join_point: &JoinPoint<'_>) -> AdviceResult {
    match callbacks.split_first() {
        Some((head, rest)) => head.invoke(join_point, &mut || dispatch(rest, join_point)),
        None if join_point.method.name.starts_with("cancel") => Err(AopError::ProceedFailed {
            method: join_point.signature(),
            message: "订单已发货".to_string(),
        }),
        None => Ok(Box::new("done") as Box<dyn Any + Send>),
    }
}

#[test]
fn test_aspect_dispatch_order() {
    init_test_logger();
    let log = Arc::new(Mutex::new(Vec::new()));
    let recording = |name: &'static str| -> Callback {
        Arc::new(RecordingAdvice {
            name,
            log: log.clone(),
        })
    };

    let mut aspect = Aspect::new(
        Arc::new(MethodNamePointcut::new("place*")),
        vec![recording("tx")],
    );
    aspect.add_advice(vec![recording("audit")]);

    let target = Target::of::<OrderService>().with_bean_name("orderService");
    let method = MethodInfo::new("place_order");
    assert_eq!(aspect.matches(&method, &target), 1);
    assert_eq!(aspect.matches(&MethodInfo::new("cancel"), &target), 0);

    let callbacks = aspect.to_array_advice();
    assert_eq!(callbacks.len(), 3);
    assert!(NoOpAdvice::is_no_op(&callbacks[0]));
    assert!(Arc::ptr_eq(&callbacks[0], &NoOpAdvice::shared()));

    let join_point = JoinPoint::new(&method, &target);
    let result = dispatch(&callbacks, &join_point).unwrap();
    assert_eq!(*result.downcast::<&str>().unwrap(), "done");

    let log = log.lock().unwrap();
    assert_eq!(
        *log,
        vec![
            "tx -> OrderService.place_order".to_string(),
            "audit -> OrderService.place_order".to_string(),
        ]
    );
}

#[test]
fn test_target_failure_propagates_through_advices() {
    init_test_logger();
    let log = Arc::new(Mutex::new(Vec::new()));
    let aspect = Aspect::new(
        Arc::new(MethodNamePointcut::new("*")),
        vec![Arc::new(RecordingAdvice {
            name: "audit",
            log: log.clone(),
        }) as Callback],
    );
    let target = Target::of::<OrderService>().with_bean_name("orderService");
    let method = MethodInfo::new("cancel_order");

    let err = dispatch(&aspect.to_array_advice(), &JoinPoint::new(&method, &target)).unwrap_err();
    assert_eq!(
        err,
        AopError::ProceedFailed {
            method: "OrderService.cancel_order".to_string(),
            message: "订单已发货".to_string(),
        }
    );
    // 通知在目标失败前已经执行
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn test_advice_can_stop_the_chain() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut aspect = Aspect::new(
        Arc::new(MethodNamePointcut::new("place*")),
        vec![Arc::new(NamedTargetGuard) as Callback],
    );
    aspect.add_advice(vec![Arc::new(RecordingAdvice {
        name: "audit",
        log: log.clone(),
    }) as Callback]);

    let anonymous = Target::of::<OrderService>();
    let method = MethodInfo::new("place_order");
    let err = dispatch(&aspect.to_array_advice(), &JoinPoint::new(&method, &anonymous)).unwrap_err();

    assert!(matches!(err, AopError::AdviceFailed { ref advice, .. } if advice == "NamedTargetGuard"));
    assert!(err.to_string().contains("OrderService.place_order"));
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_annotation_pointcut_through_aspect() {
    let transactional = Annotation::new("Transactional");
    let pointcut = Arc::new(AnnotationPointcut::new(transactional.clone()));
    let aspect = Aspect::new(pointcut.clone(), Vec::new());
    let target = Target::of::<OrderService>();

    for method in [
        MethodInfo::new("place").annotated(transactional),
        MethodInfo::new("list"),
    ] {
        assert_eq!(
            aspect.matches(&method, &target),
            pointcut.matches(&method, &target)
        );
    }
}
