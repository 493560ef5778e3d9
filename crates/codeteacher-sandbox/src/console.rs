//! The `console` global and its capture window.
//!
//! Outside of a run, `console` methods forward to `tracing`. During a run,
//! [`LogInterception`] swaps `console.log` for a function that appends to a
//! per-run sink and puts the original back when it is dropped.

use boa_engine::object::builtins::{JsArray, JsFunction};
use boa_engine::object::{FunctionObjectBuilder, ObjectInitializer};
use boa_engine::property::Attribute;
use boa_engine::{
    js_string, Context, JsNativeError, JsObject, JsResult, JsString, JsValue, NativeFunction,
};
use boa_gc::{Finalize, Trace};
use std::ops::{Deref, DerefMut};
use tracing::warn;

const CONSOLE_TARGET: &str = "codeteacher::console";

/// Renders `console` arguments the way a browser console would.
///
/// Holds the realm's own `JSON.stringify` and `String` so later reassignment of
/// those globals by a snippet does not change how output is rendered.
#[derive(Debug, Clone, Trace, Finalize)]
pub(crate) struct Renderer {
    stringify: JsObject,
    to_string: JsObject,
}

impl Renderer {
    pub(crate) fn from_realm(context: &mut Context) -> JsResult<Self> {
        let global = context.global_object();

        let json = global.get(js_string!("JSON"), context)?;
        let stringify = match json.as_object() {
            Some(json) => json.get(js_string!("stringify"), context)?,
            None => JsValue::undefined(),
        };
        let to_string = global.get(js_string!("String"), context)?;

        Ok(Self {
            stringify: callable(&stringify, "JSON.stringify")?,
            to_string: callable(&to_string, "String")?,
        })
    }

    /// Space-join the rendered arguments.
    ///
    /// `null` and non-function objects go through `JSON.stringify(arg, null, 2)`;
    /// everything else through `String(arg)`.
    pub(crate) fn render(&self, args: &[JsValue], context: &mut Context) -> JsResult<String> {
        let mut parts = Vec::with_capacity(args.len());
        for arg in args {
            let rendered = if arg.is_null() || (arg.is_object() && !arg.is_callable()) {
                self.stringify.call(
                    &JsValue::undefined(),
                    &[arg.clone(), JsValue::null(), JsValue::from(2)],
                    context,
                )?
            } else {
                self.to_string
                    .call(&JsValue::undefined(), &[arg.clone()], context)?
            };
            // JSON.stringify can yield undefined, which joins as an empty string.
            parts.push(
                rendered
                    .as_string()
                    .map(JsString::to_std_string_lossy)
                    .unwrap_or_default(),
            );
        }
        Ok(parts.join(" "))
    }
}

fn callable(value: &JsValue, name: &str) -> JsResult<JsObject> {
    value.as_callable().cloned().ok_or_else(|| {
        JsNativeError::typ()
            .with_message(format!("{} is not available in this realm", name))
            .into()
    })
}

#[derive(Trace, Finalize)]
struct CaptureState {
    renderer: Renderer,
    sink: JsArray,
}

fn emit_log(line: &str) {
    tracing::info!(target: CONSOLE_TARGET, "{}", line);
}

fn emit_debug(line: &str) {
    tracing::debug!(target: CONSOLE_TARGET, "{}", line);
}

fn emit_warn(line: &str) {
    tracing::warn!(target: CONSOLE_TARGET, "{}", line);
}

fn emit_error(line: &str) {
    tracing::error!(target: CONSOLE_TARGET, "{}", line);
}

fn host_method(renderer: &Renderer, emit: fn(&str)) -> NativeFunction {
    NativeFunction::from_copy_closure_with_captures(
        move |_this, args, renderer: &Renderer, context| {
            emit(&renderer.render(args, context)?);
            Ok(JsValue::undefined())
        },
        renderer.clone(),
    )
}

/// Define the ambient `console` global and return it.
pub(crate) fn install_console(context: &mut Context, renderer: &Renderer) -> JsResult<JsObject> {
    let console = ObjectInitializer::new(context)
        .function(host_method(renderer, emit_log), js_string!("log"), 0)
        .function(host_method(renderer, emit_log), js_string!("info"), 0)
        .function(host_method(renderer, emit_debug), js_string!("debug"), 0)
        .function(host_method(renderer, emit_warn), js_string!("warn"), 0)
        .function(host_method(renderer, emit_error), js_string!("error"), 0)
        .build();

    context.register_global_property(
        js_string!("console"),
        console.clone(),
        Attribute::WRITABLE | Attribute::CONFIGURABLE,
    )?;
    Ok(console)
}

/// The current `console` global, reinstalled if a snippet removed it.
pub(crate) fn resolve_console(context: &mut Context, renderer: &Renderer) -> JsResult<JsObject> {
    let value = context.global_object().get(js_string!("console"), context)?;
    match value.as_object() {
        Some(console) => Ok(console.clone()),
        None => install_console(context, renderer),
    }
}

/// A `console.log` replacement that appends each call to `sink`.
pub(crate) fn capture_function(
    context: &mut Context,
    renderer: &Renderer,
    sink: &JsArray,
) -> JsFunction {
    let state = CaptureState {
        renderer: renderer.clone(),
        sink: sink.clone(),
    };

    let log = NativeFunction::from_copy_closure_with_captures(
        |_this, args, state: &CaptureState, context| {
            let line = state.renderer.render(args, context)?;
            state.sink.push(JsString::from(line.as_str()), context)?;
            Ok(JsValue::undefined())
        },
        state,
    );

    FunctionObjectBuilder::new(context.realm(), log)
        .name("log")
        .length(0)
        .build()
}

/// Scoped replacement of `console.log`.
///
/// Derefs to the engine context so the snippet runs through the guard; the
/// original binding is written back on drop, whichever way the run ended.
pub(crate) struct LogInterception<'a> {
    context: &'a mut Context,
    console: JsObject,
    original: JsValue,
}

impl<'a> LogInterception<'a> {
    pub(crate) fn install(
        context: &'a mut Context,
        console: JsObject,
        capture: JsFunction,
    ) -> JsResult<Self> {
        let original = console.get(js_string!("log"), context)?;
        console.set(js_string!("log"), capture, true, context)?;
        Ok(Self {
            context,
            console,
            original,
        })
    }
}

impl Deref for LogInterception<'_> {
    type Target = Context;

    fn deref(&self) -> &Context {
        &*self.context
    }
}

impl DerefMut for LogInterception<'_> {
    fn deref_mut(&mut self) -> &mut Context {
        &mut *self.context
    }
}

impl Drop for LogInterception<'_> {
    fn drop(&mut self) {
        match self
            .console
            .set(js_string!("log"), self.original.clone(), false, &mut *self.context)
        {
            Ok(true) => {}
            Ok(false) => warn!("console.log is no longer writable; original not restored"),
            Err(err) => warn!("Restoring console.log failed: {}", err),
        }
    }
}
