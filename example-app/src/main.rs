//! # 示例应用程序
//!
//! 演示组件定义解析和切面匹配

use anyhow::Context;
use clap::Parser;
use di_abstractions::{
    Advice, AdviceResult, BeanDefinition, Callback, JoinPoint, Pointcut, Target,
};
use di_impl::{
    AnnotationPointcut, Aspect, BeanDefinitionRegistry, DefinitionSettings, MethodNamePointcut,
};
use ioc_common::{
    Annotation, Bean, BeanClass, ConfigSection, ConstructorInfo, DependencyError, FactoryBean,
    FieldInfo, MethodInfo, TypeInfo,
};
use std::any::Any;
use std::sync::Arc;
use tracing::{error, info};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "组件定义解析与切面示例")]
struct Args {
    /// JSON 配置文件路径
    #[arg(short, long)]
    config: Option<String>,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

struct Database;
struct Clock;

struct OrderRepository;

impl Bean for OrderRepository {
    fn bean_class() -> BeanClass {
        BeanClass::of::<Self>().with_constructor(
            ConstructorInfo::new()
                .with_parameter(TypeInfo::of::<Database>())
                .annotated(Annotation::INJECT),
        )
    }
}

struct OrderService;

impl Bean for OrderService {
    fn bean_class() -> BeanClass {
        BeanClass::of::<Self>()
            .with_field(
                FieldInfo::of::<OrderRepository>("repository").annotated(Annotation::INJECT),
            )
            .with_field(FieldInfo::of::<OrderRepository>("archive_repository"))
            .with_method(
                MethodInfo::new("set_clock")
                    .with_parameter(TypeInfo::of::<Clock>())
                    .annotated(Annotation::INJECT),
            )
            .with_field(FieldInfo::of::<Clock>("clock"))
            .with_field(FieldInfo::of::<String>("region"))
    }
}

struct DatabaseFactory;

impl FactoryBean for DatabaseFactory {
    fn object_type(&self) -> TypeInfo {
        TypeInfo::of::<Database>()
    }

    fn create_object(&self) -> Result<Arc<dyn Any + Send + Sync>, DependencyError> {
        Ok(Arc::new(Database))
    }
}

impl Bean for DatabaseFactory {
    fn bean_class() -> BeanClass {
        BeanClass::of::<Self>().implementing::<dyn FactoryBean>()
    }
}

/// 记录方法进入与退出的通知
#[derive(Debug)]
struct LoggingAdvice;

impl Advice for LoggingAdvice {
    fn name(&self) -> &str {
        "LoggingAdvice"
    }

    fn invoke(
        &self,
        join_point: &JoinPoint<'_>,
        proceed: &mut dyn FnMut() -> AdviceResult,
    ) -> AdviceResult {
        info!("→ 进入: {}", join_point.signature());
        let result = proceed();
        info!("← 退出: {}", join_point.signature());
        result
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(args.log_level.as_str())
        .init();

    info!("启动组件定义示例");

    let settings = load_settings(&args)?;
    let registry = BeanDefinitionRegistry::from_settings(settings)?;

    demonstrate_definitions(&registry)?;
    demonstrate_aspect();

    info!("示例结束");
    Ok(())
}

/// 加载配置，没有指定配置文件时使用默认值
fn load_settings(args: &Args) -> anyhow::Result<DefinitionSettings> {
    let Some(path) = &args.config else {
        return Ok(DefinitionSettings::default());
    };

    let root = ConfigSection::from_json_file(path)
        .with_context(|| format!("读取配置文件失败: {path}"))?;
    let settings = DefinitionSettings::from_section(&root)?;
    info!("已加载配置: {:?}", settings);
    Ok(settings)
}

/// 演示组件定义解析
fn demonstrate_definitions(registry: &BeanDefinitionRegistry) -> anyhow::Result<()> {
    for definition in [
        registry.register_bean::<OrderRepository>()?,
        registry.register_bean::<OrderService>()?,
        registry.register_bean::<DatabaseFactory>()?,
    ] {
        report(definition.as_ref());
    }

    let broken = BeanClass::of::<Clock>()
        .with_method(MethodInfo::new("init").annotated(Annotation::INJECT));
    if let Err(e) = registry.register(&broken) {
        error!("组件定义解析失败: {}", e);
    }

    info!("共注册 {} 个组件定义", registry.len());
    Ok(())
}

fn report(definition: &dyn BeanDefinition) {
    let mut fields: Vec<&str> = definition
        .inject_fields()
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    fields.sort_unstable();

    info!(
        "{}: 注入方式 {:?}, 构造器注入 {}, 字段 {:?}, 工厂组件 {}",
        definition.bean_class().type_info.short_name(),
        definition.resolved_inject_mode(),
        definition.inject_constructor().is_some(),
        fields,
        definition.is_factory_bean_type()
    );
}

/// 演示切面匹配
fn demonstrate_aspect() {
    let logging: Callback = Arc::new(LoggingAdvice);
    let mut aspect = Aspect::new(Arc::new(MethodNamePointcut::new("place*")), Vec::new());
    aspect.add_advice(vec![logging]);

    let transactional = Annotation::new("Transactional");
    let tx_pointcut = AnnotationPointcut::new(transactional.clone());

    let target = Target::of::<OrderService>().with_bean_name("orderService");
    let methods = [
        MethodInfo::new("place_order").annotated(transactional),
        MethodInfo::new("list_orders"),
    ];

    for method in &methods {
        let score = aspect.matches(method, &target);
        info!(
            "{}.{}: 切面匹配 {}, 事务切点 {}",
            target.type_info.short_name(),
            method.name,
            score,
            tx_pointcut.matches(method, &target)
        );

        if score > 0 {
            let join_point = JoinPoint::new(method, &target);
            let callbacks = aspect.to_array_advice();
            let result = dispatch(&callbacks, &join_point);
            info!("调用结果: {}", result.is_ok());
        }
    }
}

/// 依次执行回调链，最后调用目标方法
fn dispatch(callbacks: &[Callback], join_point: &JoinPoint<'_>) -> AdviceResult {
    match callbacks.split_first() {
        Some((head, rest)) => head.invoke(join_point, &mut || dispatch(rest, join_point)),
        None => Ok(Box::new(()) as Box<dyn Any + Send>),
    }
}
