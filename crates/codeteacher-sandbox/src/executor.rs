//! Snippet execution inside an embedded JavaScript realm.

use crate::console::{capture_function, install_console, resolve_console, LogInterception, Renderer};
use crate::error::SandboxError;
use crate::limits::ExecutionLimits;
use crate::output::{OutputLine, UNKNOWN_ERROR};
use crate::Result;
use boa_engine::object::builtins::JsArray;
use boa_engine::{
    js_string, Context, JsError, JsNativeError, JsObject, JsResult, JsString, JsValue, Source,
};
use tracing::{debug, warn};

/// Runs JavaScript snippets and captures their `console.log` output.
///
/// Each executor owns one realm. Globals a snippet assigns explicitly (for
/// example through `globalThis`) survive into later runs; declarations inside
/// the snippet do not, because every snippet becomes the body of a fresh
/// function expression evaluated at global scope.
///
/// Execution is synchronous. `execute` takes `&mut self`, so one executor can
/// never have two runs in flight.
pub struct ScriptExecutor {
    /// Engine realm.
    context: Context,

    /// The realm's `Function` constructor, captured before any snippet ran.
    /// Only used to check that a snippet parses as a function body.
    function_constructor: JsObject,

    /// Argument renderer shared by the ambient and capturing consoles.
    renderer: Renderer,

    /// Limits applied to the realm.
    limits: ExecutionLimits,
}

impl ScriptExecutor {
    /// Create an executor with a fresh realm.
    pub fn new(limits: ExecutionLimits) -> Result<Self> {
        let mut context = Context::default();
        limits.apply(&mut context);

        let setup = |context: &mut Context| -> JsResult<(JsObject, Renderer)> {
            let renderer = Renderer::from_realm(context)?;
            install_console(context, &renderer)?;
            let constructor = context
                .global_object()
                .get(js_string!("Function"), context)?;
            let constructor = constructor.as_callable().cloned().ok_or_else(|| {
                JsError::from(JsNativeError::typ().with_message("Function is not callable"))
            })?;
            Ok((constructor, renderer))
        };

        let (function_constructor, renderer) =
            setup(&mut context).map_err(|e| SandboxError::setup_failed(e.to_string()))?;

        debug!(bounded = limits.is_bounded(), "Created script executor");

        Ok(Self {
            context,
            function_constructor,
            renderer,
            limits,
        })
    }

    /// Discard all realm state and start over with the same limits.
    pub fn reset(&mut self) -> Result<()> {
        *self = Self::new(self.limits.clone())?;
        Ok(())
    }

    /// Get the limits applied to this executor.
    pub fn limits(&self) -> &ExecutionLimits {
        &self.limits
    }

    /// Execute a snippet and return the lines it produced.
    ///
    /// This never fails. A snippet that throws yields the lines it logged
    /// before throwing followed by exactly one error line.
    pub fn execute(&mut self, source: &str) -> Vec<OutputLine> {
        debug!(bytes = source.len(), "Executing snippet");

        let sink = JsArray::new(&mut self.context);
        let outcome = self.run_captured(source, &sink);

        let mut lines = self.drain(&sink);
        if let Err(err) = outcome {
            let text = self.describe(&err);
            debug!(error = %text, "Snippet raised");
            lines.push(OutputLine::error(text));
        }

        debug!(lines = lines.len(), "Snippet finished");
        lines
    }

    fn run_captured(&mut self, source: &str, sink: &JsArray) -> JsResult<()> {
        let console = resolve_console(&mut self.context, &self.renderer)?;
        let capture = capture_function(&mut self.context, &self.renderer, sink);
        let mut scope = LogInterception::install(&mut self.context, console, capture)?;

        // A well-formed function body cannot close the wrapper below early.
        // Never call what this constructor returns; class declarations inside
        // such functions panic in Boa 0.20.
        let body = JsValue::from(JsString::from(source));
        self.function_constructor
            .call(&JsValue::undefined(), &[body], &mut scope)?;

        let wrapped = format!("(function () {{\n{}\n}})", source);
        let function = scope.eval(Source::from_bytes(&wrapped))?;
        let function = function.as_callable().ok_or_else(|| {
            JsError::from(
                JsNativeError::typ().with_message("snippet did not compile to a function"),
            )
        })?;

        function.call(&JsValue::undefined(), &[], &mut scope)?;
        Ok(())
    }

    fn drain(&mut self, sink: &JsArray) -> Vec<OutputLine> {
        let length = match sink.length(&mut self.context) {
            Ok(length) => u32::try_from(length).unwrap_or(u32::MAX),
            Err(err) => {
                warn!("Reading captured output failed: {}", err);
                return Vec::new();
            }
        };

        let mut lines = Vec::with_capacity(length as usize);
        for index in 0..length {
            match sink.get(index, &mut self.context) {
                Ok(value) => lines.push(OutputLine::output(
                    value
                        .as_string()
                        .map(JsString::to_std_string_lossy)
                        .unwrap_or_default(),
                )),
                Err(err) => warn!(index, "Reading captured line failed: {}", err),
            }
        }
        lines
    }

    fn describe(&mut self, err: &JsError) -> String {
        match err.try_native(&mut self.context) {
            Ok(native) => format!("Error: {}", native.message()),
            Err(_) => UNKNOWN_ERROR.to_string(),
        }
    }
}
