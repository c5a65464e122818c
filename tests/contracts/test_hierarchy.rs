/// Whole-hierarchy registration scenarios: interfaces layered over the
/// contract root, plain bases mixed in, and member lookup through the
/// finished linearization.
use strake_core::store::TypeStore;
use strake_core::types::{MemberDecl, Param, TypeSpec};
use strake_enforce::engine::ContractEngine;

fn self_param() -> Vec<Param> {
    vec![Param::positional("self")]
}

#[test]
fn multi_level_hierarchy_registers_and_resolves() {
    let mut engine = ContractEngine::new();
    let root = engine.root();

    let ifoo = engine
        .register(
            TypeSpec::new("IFoo")
                .extend(root)
                .member(
                    MemberDecl::instance_method(
                        "foo",
                        vec![Param::positional("self"), Param::positional("a")],
                    )
                    .mark_abstract(),
                )
                .member(
                    MemberDecl::class_method("foo_classmethod", vec![Param::positional("cls")])
                        .mark_abstract(),
                )
                .member(MemberDecl::static_method("foo_staticmethod", vec![]).mark_abstract())
                .member(MemberDecl::property("bar").mark_abstract())
                .member(MemberDecl::instance_method("hmm", self_param())),
        )
        .expect("interfaces may stay abstract");

    let inew = engine
        .register(
            TypeSpec::new("INewFoo")
                .extend(ifoo)
                .extend(root)
                .member(MemberDecl::instance_method("new_foo", self_param()).mark_abstract())
                .member(MemberDecl::instance_method("hmm", self_param())),
        )
        .expect("sub-interfaces with a direct root base may stay abstract");

    // A plain base outside the contract hierarchy, in the middle of the
    // final class's base list.
    let record = engine
        .register(
            TypeSpec::new("Record").member(MemberDecl::instance_method("save", self_param())),
        )
        .expect("non-participants register without checks");

    let foo = engine
        .register(
            TypeSpec::new("Foo")
                .extend(record)
                .extend(inew)
                .member(MemberDecl::instance_method(
                    "foo",
                    vec![Param::positional("self"), Param::positional("a")],
                ))
                .member(MemberDecl::instance_method("new_foo", self_param()))
                .member(MemberDecl::class_method(
                    "foo_classmethod",
                    vec![Param::positional("cls")],
                ))
                .member(MemberDecl::static_method("foo_staticmethod", vec![]))
                .member(MemberDecl::property("bar")),
        )
        .expect("a complete implementation registers");

    // Every abstract member resolves to Foo's concrete override.
    for name in ["foo", "new_foo", "foo_classmethod", "foo_staticmethod", "bar"] {
        let (owner, member) = engine.resolve_member(foo, name).unwrap();
        assert_eq!(owner, foo, "{name} should resolve on Foo");
        assert!(!member.is_abstract);
    }

    // Inherited members resolve to their most-derived declaration.
    let (owner, _) = engine.resolve_member(foo, "hmm").unwrap();
    assert_eq!(owner, inew);
    let (owner, _) = engine.resolve_member(foo, "save").unwrap();
    assert_eq!(owner, record);
}

#[test]
fn two_disjoint_interfaces_satisfied_by_one_class() {
    let mut engine = ContractEngine::new();
    let root = engine.root();

    let ifoo = engine
        .register(
            TypeSpec::new("IFoo").extend(root).member(
                MemberDecl::instance_method(
                    "foo",
                    vec![Param::positional("self"), Param::positional("a")],
                )
                .mark_abstract(),
            ),
        )
        .unwrap();
    let inew = engine
        .register(
            TypeSpec::new("INewFoo")
                .extend(root)
                .member(MemberDecl::instance_method("new_foo", self_param()).mark_abstract()),
        )
        .unwrap();
    let record = engine.register(TypeSpec::new("Record")).unwrap();

    engine
        .register(
            TypeSpec::new("Foo")
                .extend(record)
                .extend(ifoo)
                .extend(inew)
                .member(MemberDecl::instance_method(
                    "foo",
                    vec![Param::positional("self"), Param::positional("a")],
                ))
                .member(MemberDecl::instance_method("new_foo", self_param())),
        )
        .unwrap();
}

#[test]
fn diamond_hierarchy_validates_once_per_declaration() {
    let mut engine = ContractEngine::new();
    let root = engine.root();

    let base = engine
        .register(
            TypeSpec::new("IBase")
                .extend(root)
                .member(MemberDecl::instance_method("run", self_param()).mark_abstract()),
        )
        .unwrap();
    let left = engine
        .register(TypeSpec::new("ILeft").extend(base).extend(root))
        .unwrap();
    let right = engine
        .register(TypeSpec::new("IRight").extend(base).extend(root))
        .unwrap();

    // IBase appears once in the linearization, so its abstract `run` is
    // declared once — no self-conflict through the diamond.
    engine
        .register(
            TypeSpec::new("Impl")
                .extend(left)
                .extend(right)
                .member(MemberDecl::instance_method("run", self_param())),
        )
        .unwrap();
}

#[test]
fn registry_queries_see_the_finished_hierarchy() {
    let mut engine = ContractEngine::new();
    let root = engine.root();

    let iface = engine
        .register(
            TypeSpec::new("IFoo")
                .extend(root)
                .member(MemberDecl::instance_method("foo", self_param()).mark_abstract()),
        )
        .unwrap();
    let foo = engine
        .register(
            TypeSpec::new("Foo")
                .extend(iface)
                .member(MemberDecl::instance_method("foo", self_param())),
        )
        .unwrap();

    let store = engine.store();
    assert!(store.is_ancestor(root, foo));
    assert!(store.is_ancestor(iface, foo));
    assert_eq!(store.descendants_of(root), vec![iface, foo]);
    assert_eq!(store.get_by_name("Foo").unwrap().id, foo);
    assert_eq!(store.get(foo).unwrap().linearization, vec![foo, iface, root]);
}
