// ── Parameter catalog ─────────────────────────────────────────────────────────
//
// Order matters twice: it is the order rows are listed in the menu and the
// order tokens are joined on the kernel command line.

/// How a catalog entry becomes a command-line token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Emitted as-is (`nosmt`, `mitigations=off`, …).
    Constant(&'static str),
    /// `prefix` + core range + `suffix` (`isolcpus=` + `1-12` + ``).
    CoreScoped {
        prefix: &'static str,
        suffix: &'static str,
    },
}

impl Template {
    /// Renders the token with `core_range` spliced in verbatim.
    /// The range is never parsed or validated.
    pub fn render(self, core_range: &str) -> String {
        match self {
            Template::Constant(token) => token.to_string(),
            Template::CoreScoped { prefix, suffix } => {
                format!("{}{}{}", prefix, core_range, suffix)
            }
        }
    }
}

/// One selectable kernel boot parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub key: &'static str,
    pub template: Template,
    /// Short label shown next to the checkbox.
    pub description: &'static str,
    /// Longer note shown in the info panel when the row has focus.
    pub explanation: &'static str,
}

const fn scoped(prefix: &'static str) -> Template {
    Template::CoreScoped { prefix, suffix: "" }
}

pub static CATALOG: [ParamSpec; 11] = [
    ParamSpec {
        key: "isolcpus",
        template: scoped("isolcpus="),
        description: "Isolate CPUs from scheduler",
        explanation: "Essential for RT workloads. Prevents the scheduler from placing tasks on isolated cores.",
    },
    ParamSpec {
        key: "nohz_full",
        template: scoped("nohz_full="),
        description: "Disable timer ticks on isolated cores",
        explanation: "Reduces interrupts by disabling periodic timer ticks on specified cores.",
    },
    ParamSpec {
        key: "rcu_nocbs",
        template: scoped("rcu_nocbs="),
        description: "Move RCU callbacks off isolated cores",
        explanation: "Reduces CPU overhead by moving RCU grace period handling to other cores.",
    },
    ParamSpec {
        key: "housekeeping",
        template: Template::Constant("housekeeping=cpus:0"),
        description: "Keep housekeeping tasks on CPU 0",
        explanation: "Recommended with isolation. Confines kernel housekeeping to specific cores.",
    },
    ParamSpec {
        key: "intel_pstate",
        template: Template::Constant("intel_pstate=disable"),
        description: "Disable Intel P-State driver",
        explanation: "More predictable performance. Prevents CPU frequency scaling by Intel driver.",
    },
    ParamSpec {
        key: "nosmt",
        template: Template::Constant("nosmt"),
        description: "Disable hyperthreading",
        explanation: "Better cache locality. Disables simultaneous multithreading for more predictable performance.",
    },
    ParamSpec {
        key: "intel_idle_cstate",
        template: Template::Constant("intel_idle.max_cstate=0"),
        description: "Disable Intel idle C-states",
        explanation: "Lowest latency. Prevents CPU from entering power-saving sleep states.",
    },
    ParamSpec {
        key: "processor_cstate",
        template: Template::Constant("processor.max_cstate=0"),
        description: "Disable processor C-states",
        explanation: "Prevents CPU sleep. Keeps processor in highest performance state at all times.",
    },
    ParamSpec {
        key: "mitigations",
        template: Template::Constant("mitigations=off"),
        description: "Disable security mitigations",
        explanation: "Maximum performance (less secure). Disables Spectre/Meltdown mitigations for speed.",
    },
    ParamSpec {
        key: "intel_iommu",
        template: Template::Constant("intel_iommu=off"),
        description: "Disable Intel IOMMU",
        explanation: "Reduces DMA overhead. May improve performance but reduces security isolation.",
    },
    ParamSpec {
        key: "iommu",
        template: Template::Constant("iommu=off"),
        description: "Disable generic IOMMU",
        explanation: "Reduces DMA overhead. Complements intel_iommu=off for maximum DMA performance.",
    },
];

/// Position of `key` in the catalog.
pub fn index_of(key: &str) -> Option<usize> {
    CATALOG.iter().position(|p| p.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<_> = CATALOG.iter().map(|p| p.key).collect();
        assert_eq!(keys.len(), CATALOG.len());
    }

    #[test]
    fn only_isolation_params_take_a_core_range() {
        let scoped: Vec<_> = CATALOG
            .iter()
            .filter(|p| matches!(p.template, Template::CoreScoped { .. }))
            .map(|p| p.key)
            .collect();
        assert_eq!(scoped, ["isolcpus", "nohz_full", "rcu_nocbs"]);
    }

    #[test]
    fn core_range_is_spliced_verbatim() {
        let spec = &CATALOG[index_of("rcu_nocbs").unwrap()];
        assert_eq!(spec.template.render("not a range!"), "rcu_nocbs=not a range!");

        let nosmt = &CATALOG[index_of("nosmt").unwrap()];
        assert_eq!(nosmt.template.render("2-7"), "nosmt");
    }

    #[test]
    fn index_follows_catalog_order() {
        assert_eq!(index_of("isolcpus"), Some(0));
        assert_eq!(index_of("iommu"), Some(10));
        assert_eq!(index_of("quiet"), None);
    }
}
