/// Macro for model field updates with automatic rendering.
/// Renders only if at least one field actually changed.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.permission, PermissionState::Granted)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.permission, PermissionState::Denied;
///     model.error_message, Some(message)
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}
