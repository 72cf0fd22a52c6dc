use mixkit_types::{CallError, Object, Value};

use crate::descriptor::ModuleDescriptor;
use crate::module::Module;
use crate::namespace::Namespace;

/// Registers environment queries, plus host-only utilities when the
/// namespace runs on a host.
///
/// Utilities: `isBrowser`, `isNodeJs`, `isIE`, `environment`, and on a host
/// `platform`. The `environment` summary's `type` is `"browser"` or
/// `"nodejs"` (the host kind), agreeing with `isBrowser`/`isNodeJs`.
pub struct EnvironmentModule;

impl Module for EnvironmentModule {
    fn name(&self) -> &str {
        "environment"
    }

    fn descriptor(&self, namespace: &Namespace) -> ModuleDescriptor {
        let env = namespace.environment();
        let summary = env.descriptor();

        let mut descriptor = ModuleDescriptor::new()
            .util("isBrowser", flag(env.is_browser()))
            .util("isNodeJs", flag(env.is_node_js()))
            .util("isIE", flag(env.is_ie()))
            .util("environment", move |_| Ok(summary.clone()));

        env.node_js(|| {
            descriptor = std::mem::take(&mut descriptor).util("platform", platform);
        });
        descriptor
    }
}

fn flag(value: bool) -> impl Fn(&[Value]) -> Result<Value, CallError> + Send + Sync + 'static {
    move |_: &[Value]| Ok(Value::Bool(value))
}

fn platform(_args: &[Value]) -> Result<Value, CallError> {
    let mut map = Object::new();
    map.insert("os".into(), Value::from(std::env::consts::OS));
    map.insert("arch".into(), Value::from(std::env::consts::ARCH));
    map.insert("family".into(), Value::from(std::env::consts::FAMILY));
    Ok(Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NamespaceConfig;
    use mixkit_env::EnvironmentKind;

    fn namespace(kind: EnvironmentKind) -> Namespace {
        let config = NamespaceConfig {
            environment: Some(kind),
            ..NamespaceConfig::bare()
        };
        let mut ns = Namespace::new(&config);
        ns.install(&EnvironmentModule);
        ns
    }

    #[test]
    fn host_flags() {
        let ns = namespace(EnvironmentKind::Host);
        assert_eq!(ns.call_util("isNodeJs", &[]).unwrap(), Value::Bool(true));
        assert_eq!(ns.call_util("isBrowser", &[]).unwrap(), Value::Bool(false));
        assert_eq!(ns.call_util("isIE", &[]).unwrap(), Value::Bool(false));
        let env = ns.call_util("environment", &[]).unwrap();
        assert_eq!(env.get("type"), Some(&Value::from("nodejs")));
    }

    #[test]
    fn host_registers_platform() {
        let ns = namespace(EnvironmentKind::Host);
        let platform = ns.call_util("platform", &[]).unwrap();
        assert_eq!(platform.get("os"), Some(&Value::from(std::env::consts::OS)));
        assert!(platform.get("arch").is_some());
    }

    #[test]
    fn browser_skips_host_utilities() {
        let ns = namespace(EnvironmentKind::Browser);
        assert_eq!(ns.call_util("isBrowser", &[]).unwrap(), Value::Bool(true));
        assert!(!ns.has_util("platform"));
    }

    #[test]
    fn environment_descriptor_shape() {
        let ns = namespace(EnvironmentKind::Browser);
        let env = ns.call_util("environment", &[]).unwrap();
        assert_eq!(env.get("type"), Some(&Value::from("browser")));
        assert!(env.get("version").and_then(Value::as_str).is_some());
        assert!(env.get("v").and_then(Value::as_f64).is_some());
    }
}
