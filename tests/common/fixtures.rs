pub const PKG: &str = "com.example.app";
pub const ACT: &str = "com.example.app.LoginActivity";

/// Login screen: a label, two inputs and a sign-in button in a LinearLayout.
pub const LOGIN_V1: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='yes' ?>
<hierarchy rotation="0">
  <node index="0" text="" resource-id="" class="android.widget.FrameLayout" package="com.example.app" content-desc="" clickable="false" enabled="true" password="false">
    <node index="0" text="" resource-id="com.example.app:id/form" class="android.widget.LinearLayout" package="com.example.app" content-desc="" clickable="false" enabled="true" password="false">
      <node index="0" text="Email" resource-id="com.example.app:id/email_label" class="android.widget.TextView" package="com.example.app" content-desc="" clickable="false" enabled="true" password="false" />
      <node index="1" text="" resource-id="com.example.app:id/email_input" class="android.widget.EditText" package="com.example.app" content-desc="" clickable="true" enabled="true" password="false" />
      <node index="2" text="" resource-id="com.example.app:id/password_input" class="android.widget.EditText" package="com.example.app" content-desc="" clickable="true" enabled="true" password="true" />
      <node index="3" text="Sign in" resource-id="com.example.app:id/sign_in" class="android.widget.Button" package="com.example.app" content-desc="" clickable="true" enabled="true" password="false" />
    </node>
  </node>
</hierarchy>"#;

/// Same screen with an extra "Help" button after the sign-in button.
pub const LOGIN_V2: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='yes' ?>
<hierarchy rotation="0">
  <node index="0" text="" resource-id="" class="android.widget.FrameLayout" package="com.example.app" content-desc="" clickable="false" enabled="true" password="false">
    <node index="0" text="" resource-id="com.example.app:id/form" class="android.widget.LinearLayout" package="com.example.app" content-desc="" clickable="false" enabled="true" password="false">
      <node index="0" text="Email" resource-id="com.example.app:id/email_label" class="android.widget.TextView" package="com.example.app" content-desc="" clickable="false" enabled="true" password="false" />
      <node index="1" text="" resource-id="com.example.app:id/email_input" class="android.widget.EditText" package="com.example.app" content-desc="" clickable="true" enabled="true" password="false" />
      <node index="2" text="" resource-id="com.example.app:id/password_input" class="android.widget.EditText" package="com.example.app" content-desc="" clickable="true" enabled="true" password="true" />
      <node index="3" text="Sign in" resource-id="com.example.app:id/sign_in" class="android.widget.Button" package="com.example.app" content-desc="" clickable="true" enabled="true" password="false" />
      <node index="4" text="Help" resource-id="com.example.app:id/help" class="android.widget.Button" package="com.example.app" content-desc="" clickable="true" enabled="true" password="false" />
    </node>
  </node>
</hierarchy>"#;

/// Wrap `inner` nodes in a hierarchy root.
pub fn dump(inner: &str) -> String {
    format!(r#"<hierarchy rotation="0">{inner}</hierarchy>"#)
}
