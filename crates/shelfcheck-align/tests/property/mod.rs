mod align_properties;
