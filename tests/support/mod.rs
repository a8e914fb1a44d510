//! Test harness that executes lowered statement trees.
//!
//! A tiny interpreter over [`Stmt`]/[`Expr`] with an in-memory bean model.
//! Containers are shared by reference like their Java counterparts, so
//! tests can tell "merged into the existing instance" apart from "replaced
//! by a new one".

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use mapforge::prelude::*;

/// Runtime value.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Str(String),
    /// List or set; sets drop duplicates on insert.
    Seq {
        items: Rc<RefCell<Vec<String>>>,
        unique: bool,
    },
    Map(Rc<RefCell<BTreeMap<String, String>>>),
    Object(Bean),
}

impl Value {
    pub fn list<'a>(items: impl IntoIterator<Item = &'a str>) -> Self {
        Self::seq(items, false)
    }

    pub fn set<'a>(items: impl IntoIterator<Item = &'a str>) -> Self {
        Self::seq(items, true)
    }

    fn seq<'a>(items: impl IntoIterator<Item = &'a str>, unique: bool) -> Self {
        let value = Value::Seq {
            items: Rc::new(RefCell::new(Vec::new())),
            unique,
        };
        for item in items {
            value.push(item.to_string());
        }
        value
    }

    pub fn map<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Value::Map(Rc::new(RefCell::new(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Contents of a sequence in insertion order.
    pub fn strings(&self) -> Option<Vec<String>> {
        match self {
            Value::Seq { items, .. } => Some(items.borrow().clone()),
            _ => None,
        }
    }

    pub fn entries(&self) -> Option<BTreeMap<String, String>> {
        match self {
            Value::Map(entries) => Some(entries.borrow().clone()),
            _ => None,
        }
    }

    /// Whether both values are the same container or bean instance.
    pub fn same_instance(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Seq { items: a, .. }, Value::Seq { items: b, .. }) => Rc::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(&a.0, &b.0),
            _ => false,
        }
    }

    fn push(&self, item: String) {
        if let Value::Seq { items, unique } = self {
            let mut items = items.borrow_mut();
            if !*unique || !items.contains(&item) {
                items.push(item);
            }
        }
    }

    /// Copy construction: `new <ty>(self)`. Set semantics follow `ty`.
    fn copy_as(&self, ty: &TypeRef) -> Value {
        match self {
            Value::Seq { items, .. } => {
                let copy = Value::seq(std::iter::empty(), is_set_type(ty));
                for item in items.borrow().iter() {
                    copy.push(item.clone());
                }
                copy
            }
            Value::Map(entries) => Value::Map(Rc::new(RefCell::new(entries.borrow().clone()))),
            other => other.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct BeanState {
    props: BTreeMap<String, Value>,
    adders: BTreeMap<String, String>,
}

/// Object with `getX`/`setX` properties and optional element adders.
#[derive(Debug, Clone, Default)]
pub struct Bean(Rc<RefCell<BeanState>>);

impl Bean {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, prop: &str, value: Value) -> Self {
        self.0.borrow_mut().props.insert(prop.to_string(), value);
        self
    }

    /// Register `adder` as appending to the container in `prop`.
    pub fn with_adder(self, adder: &str, prop: &str) -> Self {
        self.0
            .borrow_mut()
            .adders
            .insert(adder.to_string(), prop.to_string());
        self
    }

    pub fn get(&self, prop: &str) -> Value {
        self.0
            .borrow()
            .props
            .get(prop)
            .cloned()
            .unwrap_or(Value::Null)
    }

    fn set(&self, prop: String, value: Value) {
        self.0.borrow_mut().props.insert(prop, value);
    }

    fn adder_target(&self, method: &str) -> Option<String> {
        self.0.borrow().adders.get(method).cloned()
    }
}

/// Failure while executing generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    NullDereference(String),
    UnknownVariable(String),
    UnknownMethod(String),
    TypeMismatch(String),
}

/// Executes statement trees against bound variables and records every call.
#[derive(Debug, Default)]
pub struct Interpreter {
    vars: HashMap<String, Value>,
    raw: HashMap<String, Value>,
    calls: Vec<String>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, name: &str, value: Value) -> &mut Self {
        self.vars.insert(name.to_string(), value);
        self
    }

    /// Give an opaque upstream expression a value.
    pub fn bind_raw(&mut self, text: &str, value: Value) -> &mut Self {
        self.raw.insert(text.to_string(), value);
        self
    }

    /// Calls made so far, as `receiver.method`.
    pub fn calls(&self) -> &[String] {
        &self.calls
    }

    pub fn call_count(&self, call: &str) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn exec(&mut self, stmts: &[Stmt]) -> Result<(), RuntimeError> {
        for stmt in stmts {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    fn exec_stmt(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::Local { name, init, .. } => {
                let value = self.eval(init)?;
                self.vars.insert(name.clone(), value);
                Ok(())
            }
            Stmt::If {
                cond,
                then_branch,
                else_branch,
            } => match self.eval(cond)? {
                Value::Bool(true) => self.exec(then_branch),
                Value::Bool(false) => self.exec(else_branch),
                other => Err(RuntimeError::TypeMismatch(format!(
                    "condition '{cond}' evaluated to {other:?}"
                ))),
            },
            Stmt::ForEach {
                var,
                iterable,
                body,
                ..
            } => {
                let items = match self.eval(iterable)? {
                    Value::Null => return Err(RuntimeError::NullDereference(iterable.to_string())),
                    value => value.strings().ok_or_else(|| {
                        RuntimeError::TypeMismatch(format!("'{iterable}' is not iterable"))
                    })?,
                };
                for item in items {
                    self.vars.insert(var.clone(), Value::Str(item));
                    self.exec(body)?;
                }
                Ok(())
            }
            Stmt::Expr(expr) => self.eval(expr).map(|_| ()),
        }
    }

    pub fn eval(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Var(name) => self
                .vars
                .get(name)
                .cloned()
                .ok_or_else(|| RuntimeError::UnknownVariable(name.clone())),
            Expr::Null => Ok(Value::Null),
            Expr::Raw(text) => self
                .raw
                .get(text)
                .cloned()
                .ok_or_else(|| RuntimeError::UnknownVariable(text.clone())),
            Expr::Call {
                receiver,
                method,
                args,
            } => {
                let receiver = receiver
                    .as_deref()
                    .ok_or_else(|| RuntimeError::UnknownMethod(method.clone()))?;
                self.calls.push(format!("{receiver}.{method}"));
                let target = self.eval(receiver)?;
                let args = args
                    .iter()
                    .map(|a| self.eval(a))
                    .collect::<Result<Vec<_>, _>>()?;
                invoke(&target, method, args)
            }
            Expr::New { ty, args } => match args.first() {
                Some(arg) => match self.eval(arg)? {
                    Value::Null => Err(RuntimeError::NullDereference(format!("new {ty}"))),
                    value => Ok(value.copy_as(ty)),
                },
                None => match ty.container_kind() {
                    ContainerKind::Sequence => {
                        Ok(Value::seq(std::iter::empty(), is_set_type(ty)))
                    }
                    ContainerKind::Map => Ok(Value::map(std::iter::empty())),
                    ContainerKind::None => Ok(Value::Object(Bean::new())),
                },
            },
            Expr::Cast { expr, .. } => self.eval(expr),
            Expr::NotNull(expr) => Ok(Value::Bool(!self.eval(expr)?.is_null())),
        }
    }
}

fn is_set_type(ty: &TypeRef) -> bool {
    ty.simple_name().ends_with("Set")
}

fn property_of(method: &str, prefix: &str) -> Option<String> {
    let rest = method.strip_prefix(prefix)?;
    let mut chars = rest.chars();
    let first = chars.next()?;
    Some(first.to_lowercase().chain(chars).collect())
}

fn invoke(target: &Value, method: &str, mut args: Vec<Value>) -> Result<Value, RuntimeError> {
    let unknown = || RuntimeError::UnknownMethod(method.to_string());
    match target {
        Value::Null => Err(RuntimeError::NullDereference(method.to_string())),
        Value::Object(bean) => {
            if let Some(prop) = bean.adder_target(method) {
                let container = bean.get(&prop);
                if container.is_null() {
                    return Err(RuntimeError::NullDereference(method.to_string()));
                }
                for arg in args {
                    if let Value::Str(item) = arg {
                        container.push(item);
                    }
                }
                return Ok(Value::Null);
            }
            if args.is_empty()
                && let Some(prop) = property_of(method, "get")
            {
                return Ok(bean.get(&prop));
            }
            if args.len() == 1
                && let Some(prop) = property_of(method, "set")
            {
                bean.set(prop, args.remove(0));
                return Ok(Value::Null);
            }
            Err(unknown())
        }
        Value::Seq { items, .. } => match (method, args.as_slice()) {
            ("clear", []) => {
                items.borrow_mut().clear();
                Ok(Value::Null)
            }
            ("addAll", [Value::Null]) => Err(RuntimeError::NullDereference(method.to_string())),
            ("addAll", [other]) => {
                let added = other.strings().ok_or_else(unknown)?;
                for item in added {
                    target.push(item);
                }
                Ok(Value::Null)
            }
            _ => Err(unknown()),
        },
        Value::Map(entries) => match (method, args.as_slice()) {
            ("clear", []) => {
                entries.borrow_mut().clear();
                Ok(Value::Null)
            }
            ("putAll", [Value::Null]) => Err(RuntimeError::NullDereference(method.to_string())),
            ("putAll", [other]) => {
                let added = other.entries().ok_or_else(unknown)?;
                entries.borrow_mut().extend(added);
                Ok(Value::Null)
            }
            _ => Err(unknown()),
        },
        Value::Bool(_) | Value::Str(_) => Err(unknown()),
    }
}

/// `java.util.Set<String>`
pub fn set_of_string() -> TypeRef {
    TypeDescriptor::generic(
        "java.util.Set",
        vec![TypeDescriptor::declared("java.lang.String")],
    )
}

/// `java.util.List<String>`
pub fn list_of_string() -> TypeRef {
    TypeDescriptor::generic(
        "java.util.List",
        vec![TypeDescriptor::declared("java.lang.String")],
    )
}

/// `java.util.Map<String, String>`
pub fn map_of_string() -> TypeRef {
    let string = TypeDescriptor::declared("java.lang.String");
    TypeDescriptor::generic("java.util.Map", vec![string.clone(), string])
}

/// `source.<getter>()`
pub fn source_read(getter: &str) -> Expr {
    Expr::getter(Expr::var("source"), getter)
}

/// Scope of a mapping method with `source` and `target` parameters.
pub fn method_scope() -> VariableScope {
    VariableScope::from_names(["source", "target"])
}
