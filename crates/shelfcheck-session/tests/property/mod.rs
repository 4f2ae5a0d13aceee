mod session_properties;
